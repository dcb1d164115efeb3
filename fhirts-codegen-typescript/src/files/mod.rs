//! TypeScript file generators.

mod fhir_dts;
mod value_sets_ts;

pub use fhir_dts::{FHIR_DTS, FhirDts};
pub use value_sets_ts::{VALUE_SETS_TS, ValueSetsTs};
