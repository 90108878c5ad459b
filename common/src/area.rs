//! Affected areas.
//!
//! An area is a named bounding box; the list is loaded from an HCL file or from the built-in
//! default which only knows about Hyderabad.
//!
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use eyre::Result;
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{debug, trace};

use crate::{GeoPoint, Status, Versioned, BB};

/// Current areas file version
const AREAS_FILE_VER: usize = 1;

/// A named affected area.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    pub name: String,
    pub bb: BB,
}

impl Area {
    pub fn contains(&self, pt: &GeoPoint) -> bool {
        self.bb.contains(pt)
    }
}

/// On-disk structure for the areas file
///
#[derive(Debug, Deserialize)]
struct AreasFile {
    /// Version number for safety
    version: usize,
    /// List of areas
    #[serde(default)]
    area: BTreeMap<String, BB>,
}

impl Versioned for AreasFile {
    fn version(&self) -> usize {
        self.version
    }
}

/// Load all areas, from `fname` if given or from the built-in list.
///
#[tracing::instrument]
pub fn load_areas(fname: Option<&Path>) -> Result<Vec<Area>> {
    trace!("enter");

    let data = match fname {
        Some(fname) => fs::read_to_string(fname)?,
        None => include_str!("areas.hcl").to_owned(),
    };
    parse_areas(&data)
}

fn parse_areas(data: &str) -> Result<Vec<Area>> {
    let file: AreasFile = hcl::from_str(data)?;
    if file.version() != AREAS_FILE_VER {
        return Err(Status::BadFileVersion(file.version(), AREAS_FILE_VER).into());
    }
    debug!("{} areas loaded", file.area.len());

    Ok(file
        .area
        .into_iter()
        .map(|(name, bb)| Area { name, bb })
        .collect())
}

/// First area containing `pt`, if any.
///
pub fn find_area<'a>(areas: &'a [Area], pt: &GeoPoint) -> Option<&'a Area> {
    areas.iter().find(|a| a.contains(pt))
}

/// Look an area up by name (case-insensitive).
///
pub fn area_by_name<'a>(areas: &'a [Area], name: &str) -> Result<&'a Area> {
    areas
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Status::UnknownArea(name.to_string()).into())
}

/// List loaded areas
///
#[tracing::instrument(skip(areas))]
pub fn list_areas(areas: &[Area]) -> String {
    trace!("enter");
    let header = vec!["Area", "Bounding box", "Centre"];

    let mut builder = Builder::default();
    builder.push_record(header);

    areas.iter().for_each(|area| {
        let bb = area.bb.to_string();
        let center = area.bb.center().to_string();
        builder.push_record(vec![area.name.clone(), bb, center]);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    format!("List all areas ({}):\n{allf}", areas.len())
}
