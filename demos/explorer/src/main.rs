use argh::FromArgs;
use std::io::Read;
use std::path::PathBuf;

use linex::{Explorer, LinexConfig, LinexError, Request};

#[derive(FromArgs)]
/// Run one linear algebra operation on matrices typed as text, one row per line
struct Args {
    /// print the result as JSON
    #[argh(switch)]
    json: bool,

    /// rref only: entries at or below this magnitude are treated as zero when looking for a
    /// pivot
    #[argh(option)]
    pivot_tolerance: Option<f64>,

    /// qr, eigen and basis only: dependence tolerance of QR, imaginary tolerance of the
    /// eigenvalues, or singular tolerance of the change of basis
    #[argh(option)]
    tolerance: Option<f64>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Rref(RrefArgs),
    Qr(QrArgs),
    Eigen(EigenArgs),
    Basis(BasisArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "rref")]
/// Reduced row-echelon form
struct RrefArgs {
    /// path to the matrix, read from stdin when missing
    #[argh(positional)]
    input: Option<PathBuf>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "qr")]
/// QR factorization with Gram-Schmidt
struct QrArgs {
    /// path to the matrix, read from stdin when missing
    #[argh(positional)]
    input: Option<PathBuf>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "eigen")]
/// Real eigenvalues of a square matrix
struct EigenArgs {
    /// path to the matrix, read from stdin when missing
    #[argh(positional)]
    input: Option<PathBuf>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "basis")]
/// Change-of-basis matrices between two bases given as columns
struct BasisArgs {
    /// path to basis A
    #[argh(option, short = 'a')]
    basis_a: PathBuf,

    /// path to basis B
    #[argh(option, short = 'b')]
    basis_b: PathBuf,
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn report(err: &LinexError, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let value = serde_json::json!({
            "error": err.kind(),
            "message": err.message(),
            "detail": err.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        eprintln!("{}", err.message());
        eprintln!("  {err}");
    }
    Ok(())
}

/// Apply the tolerance flags to the settings of the selected operation.
fn build_config(args: &Args) -> Result<LinexConfig, String> {
    let mut config = LinexConfig::default();

    if let Some(tol) = args.pivot_tolerance {
        if !matches!(args.command, Command::Rref(_)) {
            return Err("--pivot-tolerance only applies to rref".to_string());
        }
        config.rref.pivot_tolerance = tol;
    }

    if let Some(tol) = args.tolerance {
        match args.command {
            Command::Rref(_) => {
                return Err("--tolerance does not apply to rref, use --pivot-tolerance".to_string())
            }
            Command::Qr(_) => config.qr.dependence_tolerance = tol,
            Command::Eigen(_) => config.eigen.imaginary_tolerance = tol,
            Command::Basis(_) => config.change_of_basis.singular_tolerance = tol,
        }
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = build_config(&args)?;

    let request = match &args.command {
        Command::Rref(cmd) => Request::Rref {
            input: read_input(cmd.input.as_ref())?,
        },
        Command::Qr(cmd) => Request::Qr {
            input: read_input(cmd.input.as_ref())?,
        },
        Command::Eigen(cmd) => Request::Eigenvalues {
            input: read_input(cmd.input.as_ref())?,
        },
        Command::Basis(cmd) => Request::ChangeOfBasis {
            basis_a: std::fs::read_to_string(&cmd.basis_a)?,
            basis_b: std::fs::read_to_string(&cmd.basis_b)?,
        },
    };

    log::debug!("running {:?}", request);

    let explorer = Explorer::new(config);
    match explorer.handle(&request) {
        Ok(response) if args.json => println!("{}", serde_json::to_string_pretty(&response)?),
        Ok(response) => println!("{response}"),
        Err(err) => {
            report(&err, args.json)?;
            std::process::exit(1);
        }
    }

    Ok(())
}
