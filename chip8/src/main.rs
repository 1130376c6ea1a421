use std::path::PathBuf;
use std::process;

mod keymap;
mod run;
mod sound;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mute = args.iter().any(|arg| arg == "--mute");
    let rom = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: chirp8 [--mute] <rom>");
            process::exit(2);
        }
    };

    if let Err(err) = run::run(&rom, mute) {
        log::error!("{}", err);
        process::exit(1);
    }
}
