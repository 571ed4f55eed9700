use crate::core::io::traits::StructureFile;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must cover columns 1-27)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reader for the fixed-column PDB coordinate-record format.
///
/// Recognizes ATOM, HETATM, MODEL, and ENDMDL records; every other record
/// type is ignored silently, since this reader feeds a statistics core rather
/// than a validator. A model begins at an explicit MODEL record or at the
/// first coordinate record, and ends at ENDMDL or end of input; files with no
/// MODEL records yield exactly one implicit model.
///
/// Only the identity fields are strict: a coordinate record with a blank
/// chain identifier or an unparseable residue sequence number is an error, as
/// is input containing no coordinate records at all. Serials, coordinates,
/// and element symbols parse leniently and fall back to defaults.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new();
        let mut atom_count: usize = 0;

        let mut current_chain_id: Option<char> = None;
        let mut current_residue_key: Option<(isize, Option<char>)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "MODEL" => {
                    let serial = slice_and_trim(&line, 10, 14)
                        .parse()
                        .unwrap_or(builder.model_count() as i32 + 1);
                    builder.start_model(serial);
                    current_chain_id = None;
                    current_residue_key = None;
                }
                "ENDMDL" => {
                    builder.end_model();
                    current_chain_id = None;
                    current_residue_key = None;
                }
                "ATOM" | "HETATM" => {
                    // Columns 1-27 hold the identity fields; everything past
                    // them (coordinates, occupancy, element) is pass-through.
                    if line.len() < 27 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id_str = slice_and_trim(&line, 21, 22);
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let icode_str = slice_and_trim(&line, 26, 27);

                    let chain_id = chain_id_str.chars().next().ok_or_else(|| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::MissingRequiredField {
                            columns: "22".into(),
                        },
                    })?;
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;
                    let icode = icode_str.chars().next();

                    // Non-identity fields are lenient: unparseable values
                    // default rather than reject the record.
                    let serial: usize = serial_str.parse().unwrap_or(0);
                    let x: f64 = slice_and_trim(&line, 30, 38).parse().unwrap_or(0.0);
                    let y: f64 = slice_and_trim(&line, 38, 46).parse().unwrap_or(0.0);
                    let z: f64 = slice_and_trim(&line, 46, 54).parse().unwrap_or(0.0);
                    let element = slice_and_trim(&line, 76, 78);

                    if !builder.in_model() {
                        builder.start_model(builder.model_count() as i32 + 1);
                        current_chain_id = None;
                        current_residue_key = None;
                    }
                    if current_chain_id != Some(chain_id) {
                        builder.start_chain(chain_id);
                        current_chain_id = Some(chain_id);
                        current_residue_key = None;
                    }
                    let residue_key = (res_seq, icode);
                    if current_residue_key != Some(residue_key) {
                        builder.start_residue(
                            res_seq,
                            icode,
                            res_name_str,
                            record_type == "HETATM",
                        );
                        current_residue_key = Some(residue_key);
                    }
                    builder.add_atom(serial, name_str, element, Point3::new(x, y, z));
                    atom_count += 1;
                }
                _ => {} // Non-coordinate records carry nothing the statistics need.
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(builder.build())
    }
}
