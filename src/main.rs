use bitflip::{FlipError, cli};

fn main() {
    if let Err(err) = cli::run() {
        match err.downcast_ref::<FlipError>() {
            // clap already rendered the usage text
            Some(FlipError::Usage(msg)) => eprint!("{msg}"),
            _ => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}
