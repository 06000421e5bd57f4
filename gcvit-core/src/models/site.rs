///
/// One decoded variant record, reduced to the calls the comparison needs:
/// the reference sample's GT string and one GT string per comparison sample,
/// in request order. `None` means the record carried no GT value for that
/// sample and is treated as an undefined call.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSite {
    pub contig: String,
    /// 1-based position.
    pub position: u64,
    pub reference_call: Option<String>,
    pub comparison_calls: Vec<(String, Option<String>)>,
}
