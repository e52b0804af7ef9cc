use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use npk_blend_rs::cli::{CalcArgs, Cli, Command};
use npk_blend_rs::error::Result;
use npk_blend_rs::interface::{
    blend_json, collect_blend_parameters, display_blend, display_ingredient_list, out_of_band,
    prompt_yes_no, write_recipe_csv, BlendParameters,
};
use npk_blend_rs::models::{BlendRequest, NutrientTriple};
use npk_blend_rs::state::load_ingredients;
use npk_blend_rs::{calculate_mix, GoodLpSolver};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc(args) => cmd_calc(&cli.file, args),
        Command::List => cmd_list(&cli.file),
    }
}

/// List the ingredient library.
fn cmd_list(file_path: &str) -> Result<()> {
    let library = load_ingredients(Path::new(file_path))?;
    display_ingredient_list(library.all(), "Ingredients");
    Ok(())
}

/// Calculate a blend.
fn cmd_calc(file_path: &str, args: CalcArgs) -> Result<()> {
    let library = load_ingredients(Path::new(file_path))?;
    info!(count = library.len(), file = file_path, "loaded ingredient library");

    let candidates = if args.only.is_empty() {
        library.all().to_vec()
    } else {
        library.select(&args.only)?
    };

    let defaults = BlendParameters {
        targets: NutrientTriple::new(args.n, args.p, args.k),
        total_weight: args.weight,
        tolerance: args.tolerance,
        increment: args.increment,
    };
    let params = if args.interactive {
        collect_blend_parameters(&defaults)?
    } else {
        defaults
    };

    let request = BlendRequest::new(
        params.targets,
        params.total_weight,
        params.tolerance,
        params.increment,
        candidates,
    );

    let blend = calculate_mix(&request, &GoodLpSolver)?;

    for (nutrient, actual, target) in out_of_band(&request, &blend) {
        warn!(
            nutrient = nutrient.symbol(),
            actual,
            target,
            "blend is outside the tolerance band"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&blend_json(&request, &blend))?);
    } else {
        display_blend(&request, &blend);
    }

    let csv_path = match args.csv {
        Some(path) => Some(path),
        None if args.interactive && !blend.is_trivial() => {
            prompt_yes_no("Export recipe to recipe.csv?", false)?
                .then(|| PathBuf::from("recipe.csv"))
        }
        None => None,
    };
    if let Some(path) = csv_path {
        write_recipe_csv(&blend, &path)?;
        println!("Recipe written to {}", path.display());
    }

    Ok(())
}
