//! Page-scoped state: lives exactly as long as one rendered landing page.

use tokio::sync::OnceCell;

use crate::content::SiteContent;
use crate::form::ContactForm;
use crate::service::ApiService;
use crate::transport::Transport;
use crate::types::BusinessHours;

#[derive(Debug, Default)]
pub struct LandingPage {
    pub form: ContactForm,
    business_hours: OnceCell<BusinessHours>,
    content: SiteContent,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hours shown in the contact panel. `None` until a load succeeds, and
    /// the panel renders without them in that case.
    pub fn business_hours(&self) -> Option<&BusinessHours> {
        self.business_hours.get()
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Populate the hours at most once. A failed load is logged and leaves
    /// the slot unset.
    pub async fn load_business_hours<T: Transport>(&self, api: &ApiService<T>) {
        let loaded = self
            .business_hours
            .get_or_try_init(|| async { api.get_business_hours().await.into_result() })
            .await;
        if let Err(failure) = loaded {
            tracing::debug!(error = %failure.error, "business hours unavailable, panel stays empty");
        }
    }

    /// Mount-time loads. Never fails and never blocks the form.
    pub async fn mount<T: Transport>(&mut self, api: &ApiService<T>) {
        let (_, content) = tokio::join!(self.load_business_hours(api), SiteContent::load(api));
        self.content = content;
    }
}
