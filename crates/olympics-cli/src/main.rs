mod command;
mod logging;
mod schema;
mod turn_loop;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
