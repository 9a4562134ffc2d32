//! YAML snapshots of intermediate matrices for debugging mismatches.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ndarray::{ArrayD, ArrayViewD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::common::error::{CmpCode, CmpError, CmpResult};
use crate::common::log::{self, Level};
use crate::common::time;

/// On-disk layout: the shape plus elements in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixDump {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl MatrixDump {
    pub fn from_view(matrix: ArrayViewD<'_, f64>) -> Self {
        Self {
            shape: matrix.shape().to_vec(),
            data: matrix.iter().copied().collect(),
        }
    }

    pub fn into_array(self) -> CmpResult<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(&self.shape), self.data)
            .map_err(|err| CmpError::invalid(format!("dump shape does not fit data: {err}")))
    }
}

fn yaml_path(stem: &Path) -> PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(".yaml");
    PathBuf::from(name)
}

/// Read a dump written by [`debug_dump`].
pub fn load_dump(path: &Path) -> CmpResult<ArrayD<f64>> {
    let text = fs::read_to_string(path)?;
    let dump: MatrixDump = serde_yaml::from_str(&text)?;
    dump.into_array()
}

/// Write `matrix` to `<stem>.yaml`, read it back and return the reloaded copy.
pub fn debug_dump(
    matrix: ArrayViewD<'_, f64>,
    stem: impl AsRef<Path>,
    log_level: u8,
) -> CmpResult<ArrayD<f64>> {
    let start = time::now_ms();
    let path = yaml_path(stem.as_ref());
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_yaml::to_writer(&mut writer, &MatrixDump::from_view(matrix))?;
    writer.flush()?;

    let loaded = load_dump(&path)?;
    log::log_json(
        log_level,
        Level::Debug,
        "dump",
        "dump.write",
        CmpCode::Ok as u32,
        time::elapsed_ms(start),
    );
    Ok(loaded)
}
