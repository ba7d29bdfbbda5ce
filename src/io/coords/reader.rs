use crate::io::error::Error;
use crate::model::{atom::Atom, system::System, types::Element};
use std::io::BufRead;
use std::str::FromStr;

pub fn read<R: BufRead>(reader: R) -> Result<System, Error> {
    let mut system = System::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        system.atoms.push(parse_atom(trimmed, line_no)?);
    }

    Ok(system)
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let parts: Vec<_> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return Err(Error::parse(
            line_no,
            "atom line needs a label, a species and three coordinates",
        ));
    }

    let label = parts[0];
    let element = element_from_label(label)
        .ok_or_else(|| Error::parse(line_no, format!("cannot infer element from '{label}'")))?;

    let species = parts[1]
        .parse::<u32>()
        .map_err(|_| Error::parse(line_no, format!("invalid species '{}'", parts[1])))?;

    let mut position = [0.0; 3];
    for (axis, (slot, raw)) in ["x", "y", "z"].iter().zip(position.iter_mut().zip(&parts[2..5])) {
        *slot = raw
            .parse::<f64>()
            .map_err(|_| Error::parse(line_no, format!("invalid {axis} coordinate '{raw}'")))?;
    }

    let movable = match parts.get(5) {
        None | Some(&"1") => true,
        Some(&"0") => false,
        Some(other) => {
            return Err(Error::parse(
                line_no,
                format!("movable flag must be 0 or 1, found '{other}'"),
            ));
        }
    };

    Ok(Atom {
        label: label.to_string(),
        element,
        species,
        position,
        movable,
    })
}

fn element_from_label(label: &str) -> Option<Element> {
    let end = label
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(label.len());
    Element::from_str(&label[..end]).ok()
}
