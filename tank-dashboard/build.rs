use std::env;
use std::fs;
use std::path::Path;

// Embeds the "Folha1" sheet export. The real export replaces
// fixtures/base1.csv; without it a one-row sample keeps the app buildable.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("base1.csv");

    let src = Path::new("../fixtures/base1.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "MUNICÍPIO,CNPJ,Razão Social,Produto,Nome Tanque,Tancagem (m³),LATITUDE,LONGITUDE\n\
             João Pessoa,00.000.000/0001-00,Posto Exemplo,Gasolina C,T1,30,-7:7:12,-34:52:12\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/base1.csv");
}
