use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use foodpad_api::HttpCatalog;
use foodpad_core::{AppConfig, AppView, FoodForm, SaveOutcome};
use foodpad_scan::{read_image, ImageDataUrl};
use foodpad_types::NutrientKind;

#[derive(Parser)]
#[command(name = "foodpad")]
#[command(about = "Foodpad food item authoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List nutrient kinds in catalog order
    Kinds,
    /// Author a food item and submit it to the catalog
    Create {
        /// Food item title
        #[arg(long, default_value = "")]
        title: String,
        /// Brand name (saving is skipped when empty)
        #[arg(long, default_value = "")]
        brand: String,
        /// Barcode digits
        #[arg(long, default_value = "")]
        barcode: String,
        /// Nutrient percentage as kind=value (repeatable)
        #[arg(long = "nutrient")]
        nutrients: Vec<String>,
    },
    /// Print the data URL for an image file
    Encode {
        /// Path to the image file
        image: PathBuf,
    },
}

/// Main entry point for the foodpad CLI
///
/// Resolves configuration from the environment once at startup, then drives
/// the authoring form or the image-encoding stage from the command line.
///
/// # Environment Variables
/// - `FOODPAD_API_URL`: Catalog service base URL (default: "http://localhost:8080")
/// - `FOODPAD_INITIAL_VIEW`: Initial screen, "main" or "create-food" (default: "create-food")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("foodpad=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env_values(
        std::env::var("FOODPAD_INITIAL_VIEW").ok(),
        std::env::var("FOODPAD_API_URL").ok(),
    )?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Kinds) => {
            for kind in NutrientKind::ALL {
                println!("{kind}");
            }
        }
        Some(Commands::Create {
            title,
            brand,
            barcode,
            nutrients,
        }) => {
            create(&config, &title, &brand, &barcode, &nutrients).await?;
        }
        Some(Commands::Encode { image }) => {
            let bytes = read_image(&image).await?;
            let data_url = ImageDataUrl::from_bytes(&bytes)?;
            println!("{data_url}");
        }
        None => {
            let view = AppView::new(config.initial_view());
            println!("foodpad — current view: {}", view.current());
            println!("run with --help for commands");
        }
    }

    Ok(())
}

async fn create(
    config: &AppConfig,
    title: &str,
    brand: &str,
    barcode: &str,
    nutrients: &[String],
) -> anyhow::Result<()> {
    let mut form = FoodForm::new();
    form.update_title(title);
    form.update_brand(brand);
    form.update_barcode(barcode);

    for raw in nutrients {
        let (kind, value) = parse_nutrient_arg(raw)?;
        form.set_nutrient_to_add(kind);
        if !form.add_nutrient().is_applied() {
            anyhow::bail!("duplicate nutrient kind: {kind}");
        }
        form.update_nutrient_percentage(kind, value);
    }

    let base_url: Url = config.catalog_base_url().parse()?;
    let catalog = HttpCatalog::new(base_url)?;

    match form.save(&catalog).await? {
        SaveOutcome::Saved => println!(
            "Saved \"{}\" with {} nutrient(s)",
            form.title(),
            form.nutrients().len()
        ),
        SaveOutcome::SkippedEmptyBrand => println!("Not saved: brand is empty"),
    }

    Ok(())
}

fn parse_nutrient_arg(raw: &str) -> anyhow::Result<(NutrientKind, &str)> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected kind=value, got {raw:?}"))?;
    Ok((kind.parse()?, value))
}
