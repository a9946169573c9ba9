use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, CorsConfig, JwtConfig, MongoConfig};
use crate::middlewares::auth_middleware::AuthState;
use crate::model::user::{User, ROLE_ADMIN};
use crate::repository;
use crate::repository::contact_message_repo::MongoContactMessageRepository;
use crate::repository::container_type_repo::MongoContainerTypeRepository;
use crate::repository::goods_type_repo::MongoGoodsTypeRepository;
use crate::repository::location_repo::MongoLocationRepository;
use crate::repository::quote_repo::MongoQuoteRepository;
use crate::repository::service_offering_repo::MongoServiceOfferingRepository;
use crate::repository::shipment_repo::MongoShipmentRepository;
use crate::repository::tracking_event_repo::MongoTrackingEventRepository;
use crate::repository::user_repo::{UserRepository, UserRepositoryImpl};
use crate::router::contact_router::contact_router;
use crate::router::container_router::container_router;
use crate::router::goods_router::goods_router;
use crate::router::location_router::location_router;
use crate::router::offering_router::offering_router;
use crate::router::quote_router::quote_router;
use crate::router::shipment_router::shipment_router;
use crate::router::tracking_router::tracking_router;
use crate::router::user_router::user_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::container_service::ContainerServiceImpl;
use crate::service::goods_service::GoodsServiceImpl;
use crate::service::location_service::LocationServiceImpl;
use crate::service::offering_service::OfferingServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::service::shipment_service::ShipmentServiceImpl;
use crate::service::tracking_service::TrackingServiceImpl;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::jwt::JwtTokenUtilsImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    user_service: Arc<UserServiceImpl>,
    user_repo: Arc<UserRepositoryImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let cors_config = CorsConfig::from_env();

        let db = repository::connect(&mongo_config)
            .await
            .expect("MongoDB connection error");

        let user_repo = Arc::new(UserRepositoryImpl::new(&db));
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let user_service = Arc::new(UserServiceImpl::new(user_repo.clone(), jwt_utils.clone()));

        let location_service = Arc::new(LocationServiceImpl {
            location_repo: MongoLocationRepository::new(&db),
        });
        let container_service = Arc::new(ContainerServiceImpl {
            container_repo: MongoContainerTypeRepository::new(&db),
        });
        let goods_service = Arc::new(GoodsServiceImpl {
            goods_repo: MongoGoodsTypeRepository::new(&db),
        });
        let quote_service = Arc::new(QuoteServiceImpl {
            quote_repo: MongoQuoteRepository::new(&db),
        });
        let shipment_service = Arc::new(ShipmentServiceImpl {
            shipment_repo: MongoShipmentRepository::new(&db),
            quote_repo: MongoQuoteRepository::new(&db),
        });
        let tracking_service = Arc::new(TrackingServiceImpl {
            tracking_repo: MongoTrackingEventRepository::new(&db),
            shipment_repo: MongoShipmentRepository::new(&db),
        });
        let contact_service = Arc::new(ContactServiceImpl {
            message_repo: MongoContactMessageRepository::new(&db),
        });
        let offering_service = Arc::new(OfferingServiceImpl {
            offering_repo: MongoServiceOfferingRepository::new(&db),
        });

        let auth_state = Arc::new(AuthState {
            jwt_utils,
            user_repo: user_repo.clone(),
        });

        let router = Router::new()
            .merge(user_router(user_service.clone(), auth_state.clone()))
            .merge(location_router(location_service, auth_state.clone()))
            .merge(container_router(container_service, auth_state.clone()))
            .merge(goods_router(goods_service, auth_state.clone()))
            .merge(quote_router(quote_service, auth_state.clone()))
            .merge(shipment_router(shipment_service, auth_state.clone()))
            .merge(tracking_router(tracking_service, auth_state.clone()))
            .merge(contact_router(contact_service, auth_state.clone()))
            .merge(offering_router(offering_service, auth_state))
            .route("/", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&cors_config));

        let app = App {
            config,
            router,
            user_service,
            user_repo,
        };
        app.create_first_admin_user().await;
        app
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }

    /// Seed the back-office account on first boot.
    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        match self.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let user = User {
            id: None,
            name: admin_conf.name.clone(),
            email: admin_conf.email.clone(),
            password_hash: String::new(), // set by register
            phone: None,
            company_name: None,
            address: None,
            role: ROLE_ADMIN.to_string(),
            created_at: None,
            updated_at: None,
        };
        match self.user_service.register(user, admin_conf.password).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "online",
        "message": "Logistics backend API is live",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
