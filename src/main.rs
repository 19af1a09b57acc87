use calc_toolkit::output::{json, terminal};
use calc_toolkit::subnet_report;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let target = match args.as_slice() {
        [cidr_notation] => cidr_notation.clone(),
        [ip, cidr] => format!("{ip}/{cidr}"),
        _ => return Err("Usage: calc-toolkit <ip>/<cidr>  (or: <ip> <cidr>)".into()),
    };

    let info = subnet_report(&target)?;

    match std::env::var("CALC_OUTPUT").as_deref() {
        Ok("json") => println!("{}", json::to_json(&info)?),
        _ => terminal::print_subnet_report(&info),
    }

    log::info!("#End main()");
    Ok(())
}
