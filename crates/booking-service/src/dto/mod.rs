//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AvailabilityParams, CalendarParams, CreateOfferRequest, CreateOfferTypeRequest,
    CreateReservationRequest, CreateReviewRequest, LoginRequest, OfferSearchParams, PageRequest,
    RefreshTokenRequest, RegisterRequest, ReservationListParams, UpdateOfferRequest,
    UpdateReviewRequest, UpdateUserRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

pub use responses::{
    AmenityResponse, AuthResponse, AvailabilityResponse, HealthChecks, HealthResponse,
    OfferResponse, OfferTypeResponse, PaginatedResponse, PaginationMeta, ReadinessResponse,
    ReservationResponse, ReviewResponse, UserResponse,
};
