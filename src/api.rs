use dioxus::prelude::*;

use crate::shared::types::{DashboardDto, Health};

/// The one-shot status refresh. Probes the configured status endpoint and
/// folds every failure into the health value; nothing here ever reaches the
/// page as an error.
#[server(CheckHealth)]
pub async fn check_health() -> Result<Health, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::backend::status::probe().await)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(Health::Unknown)
    }
}

#[server(GetDashboard)]
pub async fn get_dashboard() -> Result<DashboardDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::backend::store::load_dashboard())
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(DashboardDto::placeholder())
    }
}
