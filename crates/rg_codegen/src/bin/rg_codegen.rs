use anyhow::Result;
use rg_codegen::cli::run_codegen;

fn main() -> Result<()> {
    run_codegen()
}
