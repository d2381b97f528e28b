use meteo_summary::{generate_daily_summary, generate_summary, load_data_from_csv};
use miette::miette;

fn main() -> miette::Result<()> {
    env_logger::init();

    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("Missing filename"))?;
    log::info!("opening {file}");

    let days = load_data_from_csv(&file)?;
    println!("{}", generate_summary(&days)?);
    print!("{}", generate_daily_summary(&days)?);

    Ok(())
}
