use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy currencies.csv to OUT_DIR for include_str
    let catalog_src = Path::new("../fixtures/currencies.csv");
    let catalog_dest = Path::new(&out_dir).join("currencies.csv");
    if catalog_src.exists() {
        fs::copy(catalog_src, &catalog_dest).unwrap();
    } else {
        fs::write(
            &catalog_dest,
            "code,name\neur,Euro\ngbp,British Pound\njpy,Japanese Yen\nusd,United States Dollar\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/currencies.csv");
}
