// demos/demo.rs
use chrono::{Days, NaiveDate};
use fast_digital::analytics::greeks::GreeksConfig;
use fast_digital::math_utils::Timer;
use fast_digital::mc::mc_engine::{mc_convergence, McConfig};
use fast_digital::output;
use fast_digital::{DigitalOption, MarketState, OptionType, PricingResult};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run_demo_mode() {
        tracing::error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run_demo_mode() -> PricingResult<()> {
    println!("Running fast-digital Demo\n");

    let value_date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("Valid date");
    let expiry = value_date + Days::new(365);
    let strike = 100.0;
    let market = MarketState::new(value_date, 100.0, 0.0, 0.2, 0.05);
    let cfg = McConfig::default();

    let call = DigitalOption::new(expiry, strike, OptionType::DigitalCall)?;
    let put = DigitalOption::new(expiry, strike, OptionType::DigitalPut)?;

    let mut timer = Timer::new();
    for option in [&call, &put] {
        timer.start();
        let analytic = option.value(&market)?;
        let analytic_ms = timer.elapsed_ms();

        timer.start();
        let estimate = option.estimate_mc(&market, &cfg)?;
        let mc_ms = timer.elapsed_ms();

        println!("{}:", option.option_type());
        println!("  Analytic:    {:.6}  ({:.3} ms)", analytic, analytic_ms);
        println!(
            "  Monte Carlo: {:.6} ± {:.6}  ({} paths, seed {}, {:.3} ms)",
            estimate.price, estimate.std_error, cfg.num_paths, cfg.seed, mc_ms
        );

        let greeks = option.greeks(&market, &GreeksConfig::default())?;
        println!(
            "  Greeks: delta={:.6} gamma={:.6} vega={:.6} theta={:.6} rho={:.6}\n",
            greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho
        );
    }

    let pair = call.value(&market)? + put.value(&market)?;
    println!(
        "Call + put = {:.6}, discount factor = {:.6}\n",
        pair,
        (-0.05_f64).exp()
    );

    let rows = mc_convergence(&call, &market, &[1_000, 10_000, 100_000, 1_000_000], cfg.seed)?;
    println!("{:>10} {:>12} {:>12} {:>12}", "Paths", "MC", "Std Error", "Abs Error");
    for row in &rows {
        println!(
            "{:>10} {:>12.6} {:>12.6} {:>12.6}",
            row.num_paths, row.mc_price, row.std_error, row.abs_error
        );
    }

    let filename = "digital_convergence.csv";
    match output::write_convergence_to_csv(filename, &rows) {
        Ok(()) => println!("\nConvergence table written to {}", filename),
        Err(e) => tracing::warn!("could not write {}: {}", filename, e),
    }

    Ok(())
}
