use std::env;
use std::fs;
use std::path::Path;

// Copy assets/ next to the built binary so the embedded-path lookups work
// when running outside the project directory.
fn main() {
    println!("cargo:rerun-if-changed=assets/*");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout");

    let dest = target_dir.join("assets");
    if dest.exists() {
        fs::remove_dir_all(&dest).unwrap();
    }
    fs::create_dir_all(&dest).unwrap();
    copy_dir_all(Path::new("assets"), &dest).unwrap();
}

fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let dest_file = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dest_file)?;
            copy_dir_all(&entry.path(), &dest_file)?;
        } else {
            fs::copy(entry.path(), &dest_file)?;
        }
    }
    Ok(())
}
