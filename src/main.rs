use sparktrail::prelude::*;

fn main() {
    let result = Trail::new()
        .with_palette(Palette::Fire)
        .run();

    if let Err(e) = result {
        eprintln!("sparktrail: {e}");
        std::process::exit(1);
    }
}
