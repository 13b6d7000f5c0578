use crate::error::Result;
use atomtype::typers::AtomVectorTyper;
use atomtype::typers::vector::GninaVectorTyper;
use std::io::Write;

pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    write_vector_names(&GninaVectorTyper::default(), &mut stdout.lock())
}

fn write_vector_names(typer: &impl AtomVectorTyper, out: &mut impl Write) -> Result<()> {
    for (position, name) in typer.get_type_names().iter().enumerate() {
        writeln!(out, "{}\t{}", position, name)?;
    }
    Ok(())
}
