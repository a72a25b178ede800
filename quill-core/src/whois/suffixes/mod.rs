//! Built-in rule tables.
//!
//! [`GENERIC`] is the base every table is composed onto. Each other module
//! holds the delta for one registry and the suffixes it serves.

mod at;
mod au;
mod be;
mod br;
mod ca;
mod cn;
mod de;
mod dk;
mod eu;
mod fi;
mod fr;
mod generic;
mod ie;
mod il;
mod it;
mod jp;
mod kr;
mod nl;
mod no;
mod pl;
mod pt;
mod ru;
mod se;
mod uk;

pub use generic::GENERIC;

use super::ruleset::SuffixRules;

/// Every built-in registry table.
pub static CATALOGUE: &[&SuffixRules] = &[
    &at::AT,
    &au::AU,
    &be::BE,
    &br::BR,
    &ca::CA,
    &cn::CN,
    &de::DE,
    &dk::DK,
    &eu::EU,
    &fi::FI,
    &fr::FR,
    &ie::IE,
    &il::IL,
    &it::IT,
    &jp::JP,
    &kr::KR,
    &nl::NL,
    &no::NO,
    &pl::PL,
    &pt::PT,
    &ru::RU,
    &se::SE,
    &uk::UK,
];
