mod command;
mod record;
mod schema;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
