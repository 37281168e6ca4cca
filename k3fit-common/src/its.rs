// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! FIT image source (`.its`) rendering.
//!
//! The document has a fixed U-Boot firmware node, one FDT node per device
//! tree, one FDT node per overlay, and one configuration per device tree.
//! The first device tree is the default configuration.

use std::fmt;

use crate::error::{ItsError, Result};
use crate::kconfig::LoadAddress;

/// U-Boot binary without an appended device tree.
pub const FIRMWARE_IMAGE: &str = "u-boot-nodtb.bin";

/// Build targets the generated document depends on.
pub const DEPS: [&str; 2] = [FIRMWARE_IMAGE, "dtbs"];

/// Extension of a compiled device tree.
pub const DTB_EXT: &str = ".dtb";

/// Last component of a `/`-separated path.
pub fn file_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Directory part of a `/`-separated path, empty if there is none.
pub fn dtb_dir(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

/// Configuration name for a device tree file: the file name without its
/// extension.
pub fn config_name(file: &str) -> &str {
    let name = file_name(file);
    name.strip_suffix(DTB_EXT)
        .or_else(|| name.rsplit_once('.').map(|(stem, _)| stem))
        .unwrap_or(name)
}

fn incbin_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// FDT image node embedding `dir/name`.
pub fn fdt_node(name: &str, dir: &str) -> String {
    format!(
        "\t\t{name} {{\n\
         \t\t\tdescription = \"{name}\";\n\
         \t\t\tdata = /incbin/(\"{path}\");\n\
         \t\t}};\n",
        name = name,
        path = incbin_path(dir, name),
    )
}

/// FDT nodes for every entry of `names`, in order.
pub fn fdt_nodes<S: AsRef<str>>(names: &[S], dir: &str) -> String {
    names
        .iter()
        .map(|name| fdt_node(name.as_ref(), dir))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Configuration node pairing the firmware with one device tree.
pub fn config_node(name: &str) -> String {
    format!(
        "\t\tconf-{name} {{\n\
         \t\t\tdescription = \"{name}\";\n\
         \t\t\tfirmware = \"u-boot\";\n\
         \t\t\tfdt = \"{name}{ext}\";\n\
         \t\t}};\n",
        name = name,
        ext = DTB_EXT,
    )
}

/// Configuration nodes for every device tree, first one as default.
pub fn configurations<S: AsRef<str>>(dtbs: &[S]) -> String {
    let mut parts = Vec::with_capacity(dtbs.len() + 1);
    for (i, dtb) in dtbs.iter().enumerate() {
        let name = config_name(dtb.as_ref());
        if i == 0 {
            parts.push(format!("\t\tdefault = \"conf-{}\";\n", name));
        }
        parts.push(config_node(name));
    }
    parts.join("\n")
}

/// A complete image source, ready to print.
#[derive(Clone, Debug)]
pub struct ImageSource {
    board: String,
    load_address: LoadAddress,
    dtb_dir: String,
    dtbs: Vec<String>,
    overlays: Vec<String>,
}

impl ImageSource {
    /// Build an image source from device tree paths and overlay file names.
    ///
    /// All blobs are included from the directory of the first device tree.
    pub fn new<S: AsRef<str>>(
        board: &str,
        load_address: LoadAddress,
        dtb_paths: &[S],
        overlays: Vec<String>,
    ) -> Result<Self> {
        let first = dtb_paths.first().ok_or(ItsError::EmptyDeviceTreeList)?;

        Ok(Self {
            board: board.to_string(),
            load_address,
            dtb_dir: dtb_dir(first.as_ref()).to_string(),
            dtbs: dtb_paths
                .iter()
                .map(|p| file_name(p.as_ref()).to_string())
                .collect(),
            overlays,
        })
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn load_address(&self) -> &LoadAddress {
        &self.load_address
    }

    pub fn dtb_dir(&self) -> &str {
        &self.dtb_dir
    }

    /// Device tree file names, in configuration order.
    pub fn dtbs(&self) -> &[String] {
        &self.dtbs
    }

    pub fn overlays(&self) -> &[String] {
        &self.overlays
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/dts-v1/;")?;
        writeln!(f)?;
        writeln!(f, "/ {{")?;
        writeln!(
            f,
            "\tdescription = \"Firmware image with one or more FDT blobs and overlays\";"
        )?;
        writeln!(f, "\t#address-cells = <0x1>;")?;
        writeln!(f)?;
        writeln!(f, "\timages {{")?;
        writeln!(f)?;
        writeln!(f, "\t\tu-boot {{")?;
        writeln!(f, "\t\t\tdescription = \"U-Boot for {} board\";", self.board)?;
        writeln!(f, "\t\t\ttype = \"firmware\";")?;
        writeln!(f, "\t\t\tarch = \"arm\";")?;
        writeln!(f, "\t\t\tos = \"u-boot\";")?;
        writeln!(f, "\t\t\tcompression = \"none\";")?;
        writeln!(f, "\t\t\tload = <{}>;", self.load_address)?;
        writeln!(f, "\t\t\tentry = <0x0>;")?;
        writeln!(f, "\t\t\tdata = /incbin/(\"{}\");", FIRMWARE_IMAGE)?;
        writeln!(f, "\t\t}};")?;

        for section in [
            fdt_nodes(&self.dtbs, &self.dtb_dir),
            fdt_nodes(&self.overlays, &self.dtb_dir),
        ] {
            if !section.is_empty() {
                writeln!(f)?;
                f.write_str(&section)?;
            }
        }

        writeln!(f, "\t}};")?;
        writeln!(f)?;
        writeln!(f, "\tconfigurations {{")?;
        f.write_str(&configurations(&self.dtbs))?;
        writeln!(f, "\t}};")?;
        write!(f, "}};")
    }
}
