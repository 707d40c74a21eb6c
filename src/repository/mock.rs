//! Mock fetch boundary for isolating providers in tests.

use mockall::mock;

use crate::domain::lead::Lead;
use crate::domain::query::QueryState;
use crate::repository::{FetchFuture, ListReader};

mock! {
    pub LeadReader {}

    impl ListReader<Lead> for LeadReader {
        fn fetch(&self, state: &QueryState) -> FetchFuture<Lead>;
    }
}
