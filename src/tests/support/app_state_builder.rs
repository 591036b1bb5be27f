use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::content::application::services::ContentRegistry;
use crate::modules::navigation::application::SmoothScrollNavigator;
use crate::tests::support::fixtures::sample_content;
use crate::tests::support::stubs::StubSubmitContactUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    content: PortfolioContent,
    navigator: SmoothScrollNavigator,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: sample_content(),
            navigator: SmoothScrollNavigator::new(),
            submit_contact: Arc::new(StubSubmitContactUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: PortfolioContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_navigator(mut self, navigator: SmoothScrollNavigator) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: Arc::new(
                ContentRegistry::new(self.content).expect("test content must be valid"),
            ),
            navigator: Arc::new(self.navigator),
            submit_contact: self.submit_contact,
        })
    }
}
