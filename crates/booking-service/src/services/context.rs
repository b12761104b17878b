//! Service context - dependency container for services

use std::sync::Arc;

use booking_common::auth::{JwtService, PasswordService};
use booking_core::traits::{
    Clock, OfferRepository, OfferTypeRepository, ReservationRepository, ReviewRepository,
    SystemClock, UserRepository,
};
use booking_core::StatusCatalog;
use booking_db::{
    MemoryStore, PgOfferRepository, PgOfferTypeRepository, PgPool, PgReservationRepository,
    PgReviewRepository, PgUserRepository,
};

use crate::notifications::NotificationQueue;

use super::error::{ServiceError, ServiceResult};

/// Everything a service needs: repositories, token and password helpers,
/// the clock that decides "today", and the notification queue.
#[derive(Clone)]
pub struct ServiceContext {
    /// `None` when running over in-memory repositories
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    offer_repo: Arc<dyn OfferRepository>,
    offer_type_repo: Arc<dyn OfferTypeRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    review_repo: Arc<dyn ReviewRepository>,

    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    clock: Arc<dyn Clock>,
    notifications: NotificationQueue,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn offer_repo(&self) -> &dyn OfferRepository {
        self.offer_repo.as_ref()
    }

    pub fn offer_type_repo(&self) -> &dyn OfferTypeRepository {
        self.offer_type_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Current calendar date according to the injected clock
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("today", &self.today())
            .finish()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    offer_repo: Option<Arc<dyn OfferRepository>>,
    offer_type_repo: Option<Arc<dyn OfferTypeRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
    notifications: Option<NotificationQueue>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// PostgreSQL repositories sharing one pool and status catalog
    pub fn postgres(mut self, pool: PgPool, catalog: Arc<StatusCatalog>) -> Self {
        self.user_repo = Some(Arc::new(PgUserRepository::new(pool.clone())));
        self.offer_repo = Some(Arc::new(PgOfferRepository::new(
            pool.clone(),
            Arc::clone(&catalog),
        )));
        self.offer_type_repo = Some(Arc::new(PgOfferTypeRepository::new(pool.clone())));
        self.reservation_repo = Some(Arc::new(PgReservationRepository::new(pool.clone(), catalog)));
        self.review_repo = Some(Arc::new(PgReviewRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Every repository backed by one in-memory store
    pub fn memory(mut self, store: Arc<MemoryStore>) -> Self {
        self.user_repo = Some(store.clone());
        self.offer_repo = Some(store.clone());
        self.offer_type_repo = Some(store.clone());
        self.reservation_repo = Some(store.clone());
        self.review_repo = Some(store);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn offer_repo(mut self, repo: Arc<dyn OfferRepository>) -> Self {
        self.offer_repo = Some(repo);
        self
    }

    pub fn offer_type_repo(mut self, repo: Arc<dyn OfferTypeRepository>) -> Self {
        self.offer_type_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Defaults to [`SystemClock`]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn notifications(mut self, queue: NotificationQueue) -> Self {
        self.notifications = Some(queue);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            offer_repo: required(self.offer_repo, "offer_repo")?,
            offer_type_repo: required(self.offer_type_repo, "offer_type_repo")?,
            reservation_repo: required(self.reservation_repo, "reservation_repo")?,
            review_repo: required(self.review_repo, "review_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            password_service: PasswordService::new(),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            notifications: required(self.notifications, "notifications")?,
        })
    }
}
