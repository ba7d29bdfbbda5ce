use crate::io::error::Error;
use crate::model::system::System;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, system: &System) -> Result<(), Error> {
    for atom in &system.atoms {
        writeln!(
            writer,
            "{}  {}   {:.2}    {:.2}    {:.2}  {}",
            atom.label,
            atom.species,
            atom.position[0],
            atom.position[1],
            atom.position[2],
            u8::from(atom.movable),
        )?;
    }
    Ok(())
}
