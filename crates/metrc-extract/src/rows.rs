//! Assembly of one document's aggregated services into output rows.

use metrc_model::{LabTestRow, ManifestHeader, ProductCatalog};

use crate::aggregate::ServiceTally;

/// Build one row per distinct canonical service, in tally (lexicographic)
/// order.
///
/// The document-identifying fields are carried by the first row of the group
/// only; every following row leaves them `None`. Descriptions come from the
/// product catalog when one is supplied.
pub fn build_document_rows(
    header: &ManifestHeader,
    customer: Option<&str>,
    tally: &ServiceTally,
    catalog: Option<&ProductCatalog>,
) -> Vec<LabTestRow> {
    let mut rows = Vec::with_capacity(tally.len());
    for (index, (service, count)) in tally.iter().enumerate() {
        let is_group_head = index == 0;
        rows.push(LabTestRow {
            customer: customer.filter(|_| is_group_head).map(str::to_string),
            manifest_number: header.manifest_number.clone().filter(|_| is_group_head),
            license_number: header.license_number.clone().filter(|_| is_group_head),
            service: service.clone(),
            count: *count,
            description: catalog
                .and_then(|catalog| catalog.description_for(service))
                .map(str::to_string),
        });
    }
    rows
}
