use ipv4_kit::output::{address_report, network_report};
use ipv4_kit::{Ipv4Address, Ipv4Network};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: ipv4-kit <address|cidr> [<address|cidr> ...]");
        return Ok(());
    }

    for arg in &args {
        if arg.contains('/') {
            let network: Ipv4Network = arg.parse()?;
            println!("{}\n", network_report(&network));
        } else {
            let ip: Ipv4Address = arg.parse()?;
            println!("{}\n", address_report(&ip));
        }
    }

    Ok(())
}
