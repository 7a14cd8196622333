use clap::Parser;
use ethereum_types::H160;
use eyre::WrapErr;
use reserve_decoder::{get_reserve_data, Config};
use std::str::FromStr;

/// Fetch and decode aave v2 reserve data for an asset
#[derive(Parser, Debug)]
struct Args {
    /// Address of the underlying asset
    asset: String,
    /// Block number to query at
    block: u64,
    /// Json-rpc endpoint, falls back to the RPC_URL environment variable
    #[arg(long)]
    rpc_url: Option<String>,
    /// LendingPool address, defaults to the mainnet deployment
    #[arg(long)]
    lending_pool: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let rpc_url = match args.rpc_url {
        Some(url) => url,
        None => std::env::var("RPC_URL").wrap_err("pass --rpc-url or set RPC_URL")?,
    };
    let config = match args.lending_pool {
        Some(pool) => Config::new(
            rpc_url,
            H160::from_str(&pool).wrap_err("invalid lending pool address")?,
        ),
        None => Config::mainnet(rpc_url),
    };
    let asset =
        hex::decode(args.asset.trim_start_matches("0x")).wrap_err("invalid asset address")?;

    let reserve = get_reserve_data(&asset, args.block, &config).await?;

    println!("configuration:\t\t\t {}", reserve.configuration);
    println!("liquidityIndex:\t\t\t {}", reserve.liquidity_index);
    println!("variableBorrowIndex:\t\t {}", reserve.variable_borrow_index);
    println!("currentLiquidityRate:\t\t {}", reserve.current_liquidity_rate);
    println!(
        "currentVariableBorrowRate:\t {}",
        reserve.current_variable_borrow_rate
    );
    println!(
        "currentStableBorrowRate:\t {}",
        reserve.current_stable_borrow_rate
    );
    println!("lastUpdateTimestamp:\t\t {}", reserve.last_update_timestamp);
    println!("aTokenAddress:\t\t\t {:?}", reserve.a_token_address);
    println!("stableDebtTokenAddress:\t\t {:?}", reserve.stable_debt_token_address);
    println!(
        "variableDebtTokenAddress:\t {:?}",
        reserve.variable_debt_token_address
    );
    println!(
        "interestRateStrategyAddress:\t {:?}",
        reserve.interest_rate_strategy_address
    );
    println!("id:\t\t\t\t {}", reserve.id);

    println!("\n#### Reserve configuration ####");
    for (name, value) in reserve.configuration_fields().iter() {
        println!("{}:\t {}", name, value);
    }

    Ok(())
}
