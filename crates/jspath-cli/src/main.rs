mod cli;
mod commands;

use cli::{DumpParams, EncodeParams, MutableParams, PrintParams, RecvParams, SendParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("encode", m)) => {
            let params = EncodeParams::from_matches(m);
            commands::encode::run(params.into());
        }
        Some(("print", m)) => {
            let params = PrintParams::from_matches(m);
            commands::print::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("mutable", m)) => {
            let params = MutableParams::from_matches(m);
            commands::mutable::run(params.into());
        }
        Some(("send", m)) => {
            let params = SendParams::from_matches(m);
            commands::wire::send(params.into());
        }
        Some(("recv", m)) => {
            let params = RecvParams::from_matches(m);
            commands::wire::recv(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
