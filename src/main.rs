use huffman::config::{Command, Config, Mode, USAGE};
use huffman::{decode_file, encode_file};
use std::env;
use std::error::Error;
use std::process::exit;

fn main() -> Result<(), Box<dyn Error>> {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("[0] {err}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    match config.mode {
        Mode::Encode => encode_file(&config.input, &config.output)?,
        Mode::Decode => decode_file(&config.input, &config.output)?,
    }
    Ok(())
}
