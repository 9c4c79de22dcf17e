//! Fixed text at the top of every generated artifact.

/// Marker line telling tooling the file is generated.
pub const AUTO_GENERATED_MARKER: &str = "// <auto-generated />";

/// Import lines emitted after the marker, in order.
pub const IMPORTS: &[&str] = &[
    "using System;",
    "using Remora.Results;",
    "using Remora.Commands;",
    "using System.Collections.Generic;",
];

/// Suffix appended to a handler name to form its shim name.
pub const SHIM_SUFFIX: &str = "_Shim";

/// Extension of generated artifacts.
pub const ARTIFACT_EXTENSION: &str = ".CommandShims.g.cs";
