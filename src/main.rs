use ping_junos::{
    create_raw_transport, install_sigint_handler, new_identifier, privilege, report, utils, GenericError, PingConfig,
    PingError, ProbeSession, StopSignal,
};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(argh::FromArgs)]
/// ping-junos - send ICMP ECHO_REQUEST to a host, JunOS style
struct Args {
    #[argh(positional)]
    /// target host to ping (e.g. 192.168.1.3 or example.com)
    host: String,

    #[argh(option, default = "64")]
    /// packet size in bytes (default: 64, range: 64-1500)
    size: u16,

    #[argh(option, default = "5")]
    /// number of packets to send (default: 5)
    count: u16,

    #[argh(switch)]
    /// send packets as fast as possible without waiting
    rapid: bool,

    #[argh(option, default = "1")]
    /// wait time in seconds between packets (default: 1)
    wait: u64,

    #[argh(switch, short = 'v')]
    /// log diagnostics to stderr
    verbose: bool,
}

fn main() {
    let args: Args = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run(&args) {
        match e.downcast_ref::<PingError>() {
            Some(ping_error) => eprintln!("{}", ping_error.message),
            None => eprintln!("{e}"),
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GenericError> {
    privilege::check_raw_socket_privilege()?;
    let config = PingConfig::new(args.count, args.size, args.rapid, Duration::from_secs(args.wait))?;
    let addr = utils::lookup_host_v4(&args.host)?;
    println!("{}", report::header_line(&args.host, addr, config.size()));

    let transport = create_raw_transport()?;
    let stop = StopSignal::new();
    install_sigint_handler(&stop)?;

    let mut session = ProbeSession::new(transport, config, new_identifier(), stop);
    let (rapid, size) = (session.config().rapid(), session.config().size());
    let stats = session.run(addr, |outcome| {
        if !rapid {
            if let Some(line) = report::outcome_line(outcome, addr, size) {
                println!("{line}");
            }
        }
    });
    // Closes the socket before the summary is printed.
    drop(session);

    if !stats.glyphs.is_empty() {
        println!("{}", stats.glyphs);
    }
    if stats.interrupted {
        println!("\n{}", report::interrupted_line());
    }
    for line in report::statistics_lines(&args.host, &stats) {
        println!("{line}");
    }
    Ok(())
}
