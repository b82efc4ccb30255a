//! Built-in demonstration dataset
//!
//! Global plastic production fates, in tonnes. Lets the pipeline run end to
//! end without any input file.

use crate::error::FlowResult;
use crate::parser::parse_tsv;
use crate::types::FlowRecord;

pub const PLASTIC_FLOWS_TSV: &str = "source\ttarget\tvalue
Total Plastic Production\tUsed Once\t5800000000
Total Plastic Production\tStill in Use\t2500000000
Used Once\tSent to Landfill or discarded\t4600000000
Used Once\tIncinerated\t700000000
Used Once\tRecycled\t500000000
Recycled\tRecycled then Incinerated\t100000000
Recycled\tRecycled then Sent to Landfill or discarded\t300000000
Recycled\tRecycled and still in use\t100000000";

/// Parse the built-in plastic dataset into flow records.
pub fn plastic_waste_flows() -> FlowResult<Vec<FlowRecord>> {
    parse_tsv(PLASTIC_FLOWS_TSV)
}
