use clap::Parser;

mod assemble;
mod cli;
mod domain;
mod loader;
mod output;
mod scan;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let docs = loader::load_spec_dir(&cli.spec_dir)?;
    let model = assemble::build_model(&docs.primary, &docs.overlays);

    let out_path = cli.output_path();
    output::write_model(&out_path, &model)?;
    output::print_summary(cli.json, &output::Summary::of(&out_path, &model))?;

    Ok(())
}
