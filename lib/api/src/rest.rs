use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse, HttpServer, ResponseError};
use listx_core::{query, Listing};
use listx_storage::SnapshotStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::validate::{escape, Validator};

/// Number of records the list views show by default
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

const PRICE_FILTER_TITLE: &str = "Filter Airbnb by Price Range";
const SEARCH_ID_TITLE: &str = "Search Property by ID";
const SEARCH_NAME_TITLE: &str = "Search Property by Name";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Head slice size for `/allData`, `/viewData` and `/viewData/clean`
    pub display_limit: usize,
    /// Directory served as static files for unmatched paths
    pub public_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            public_dir: None,
        }
    }
}

/// Shared handler state
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub display_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<SnapshotStore>, display_limit: usize) -> Self {
        Self {
            store,
            display_limit,
        }
    }
}

#[derive(Serialize)]
struct ListView<'a> {
    title: String,
    data: Vec<&'a Listing>,
    use_id_link: bool,
}

#[derive(Serialize)]
struct DetailView<'a> {
    title: &'static str,
    data: &'a Listing,
}

#[derive(Serialize)]
struct FormView {
    title: &'static str,
    action: &'static str,
    fields: &'static [&'static str],
}

#[derive(Deserialize)]
struct PropertyIdForm {
    property_id: Option<String>,
}

#[derive(Deserialize)]
struct PropertyNameForm {
    property_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceForm {
    min_price: Option<String>,
    max_price: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        store: Arc<SnapshotStore>,
        config: ApiConfig,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        let state = web::Data::new(AppState::new(store, config.display_limit));
        let public_dir = config.public_dir.filter(|dir| dir.is_dir());

        let server = HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            let app = App::new()
                .wrap(cors)
                .app_data(state.clone())
                .configure(configure);

            let app = match &public_dir {
                Some(dir) => app.service(
                    Files::new("/", dir).default_handler(fn_service(
                        |req: ServiceRequest| async {
                            let (req, _) = req.into_parts();
                            let res = ApiError::WrongRoute.error_response();
                            Ok(ServiceResponse::new(req, res))
                        },
                    )),
                ),
                None => app,
            };

            app.default_service(web::to(wrong_route))
        })
        .bind((host, port))?;

        info!("Server running at http://{}:{}", host, port);
        server.run().await
    }
}

/// Register every view. The caller adds static files and the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/allData", web::get().to(all_data))
        .route("/allData/id/{id}", web::get().to(property_by_id))
        .route("/allData/{index}", web::get().to(property_by_index))
        .route("/searchProperty", web::get().to(search_property_form))
        .route("/searchProperty", web::post().to(search_property))
        .route("/searchName", web::get().to(search_name_form))
        .route("/searchName", web::post().to(search_name))
        .route("/viewData", web::get().to(view_data))
        .route("/viewData/clean", web::get().to(view_clean_data))
        .route("/priceFilter", web::get().to(price_filter_form))
        .route("/viewData/price", web::post().to(view_price_range))
        .route("/users", web::get().to(users));
}

pub async fn wrong_route() -> Result<HttpResponse, ApiError> {
    Err(ApiError::WrongRoute)
}

fn load_dataset(state: &AppState, failure: &str) -> Result<Arc<Vec<Listing>>, ApiError> {
    state.store.load().map_err(|e| {
        error!("Error loading snapshot {:?}: {}", state.store.path(), e);
        ApiError::LoadFailed(failure.to_string())
    })
}

async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "title": "Airbnb Dashboard",
        "routes": [
            "/allData",
            "/allData/{index}",
            "/allData/id/{id}",
            "/searchProperty",
            "/searchName",
            "/viewData",
            "/viewData/clean",
            "/priceFilter",
        ],
    }))
}

async fn all_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let data = load_dataset(&state, "Failed to load data")?;
    let limited = query::head_slice(&data, state.display_limit);
    debug!("Rendering /allData with {} of {} items", limited.len(), data.len());

    Ok(HttpResponse::Ok().json(ListView {
        title: "All Airbnb Properties".to_string(),
        data: limited.iter().collect(),
        use_id_link: false,
    }))
}

async fn property_by_index(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let data = load_dataset(&state, "Failed to load property details")?;
    let listing = path
        .parse::<i64>()
        .ok()
        .and_then(|index| query::get_by_position(&data, index))
        .ok_or_else(|| ApiError::NotFound("Record not found".to_string()))?;

    Ok(HttpResponse::Ok().json(DetailView {
        title: "Property Details",
        data: listing,
    }))
}

async fn property_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let data = load_dataset(&state, "Failed to load property details")?;
    let listing = query::get_by_id(&data, &id)
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    Ok(HttpResponse::Ok().json(DetailView {
        title: "Property Details",
        data: listing,
    }))
}

async fn search_property_form() -> HttpResponse {
    HttpResponse::Ok().json(FormView {
        title: SEARCH_ID_TITLE,
        action: "/searchProperty",
        fields: &["property_id"],
    })
}

async fn search_property(
    state: web::Data<AppState>,
    form: web::Form<PropertyIdForm>,
) -> Result<HttpResponse, ApiError> {
    let mut v = Validator::new();
    let property_id = v
        .required("property_id", form.property_id.as_deref(), "Property ID is required")
        .and_then(|id| v.numeric("property_id", id, "Property ID must be numeric"));
    v.finish()
        .map_err(|errors| ApiError::validation(SEARCH_ID_TITLE, errors))?;
    let property_id = property_id.unwrap_or_default();

    let data = load_dataset(&state, "Failed to search property by ID")?;
    let listing = query::get_by_id(&data, property_id).ok_or_else(|| {
        ApiError::NotFound(format!("Property ID {} not found", escape(property_id)))
    })?;

    Ok(HttpResponse::Ok().json(ListView {
        title: format!("Property ID {} Details", escape(property_id)),
        data: vec![listing],
        use_id_link: true,
    }))
}

async fn search_name_form() -> HttpResponse {
    HttpResponse::Ok().json(FormView {
        title: SEARCH_NAME_TITLE,
        action: "/searchName",
        fields: &["property_name"],
    })
}

async fn search_name(
    state: web::Data<AppState>,
    form: web::Form<PropertyNameForm>,
) -> Result<HttpResponse, ApiError> {
    let mut v = Validator::new();
    let name = v.required(
        "property_name",
        form.property_name.as_deref(),
        "Property Name is required",
    );
    v.finish()
        .map_err(|errors| ApiError::validation(SEARCH_NAME_TITLE, errors))?;
    let name = name.unwrap_or_default();

    let data = load_dataset(&state, "Failed to search property by name")?;
    let matched = query::search_by_name(&data, name);
    if matched.is_empty() {
        return Err(ApiError::NoResults(format!(
            "No properties found containing \"{}\"",
            escape(name)
        )));
    }
    debug!("Name search {:?} matched {} listings", name, matched.len());

    Ok(HttpResponse::Ok().json(ListView {
        title: format!("Properties matching \"{}\"", escape(name)),
        data: matched,
        use_id_link: true,
    }))
}

async fn view_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let data = load_dataset(&state, "Failed to load data for viewData.")?;
    if data.is_empty() {
        return Err(ApiError::NotFound("No data available to display.".to_string()));
    }

    Ok(HttpResponse::Ok().json(ListView {
        title: "All Airbnb Data (Table View)".to_string(),
        data: query::head_slice(&data, state.display_limit).iter().collect(),
        use_id_link: false,
    }))
}

async fn view_clean_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let data = load_dataset(&state, "Failed to load clean data for viewData/clean.")?;
    if data.is_empty() {
        return Err(ApiError::NotFound("No data available to display.".to_string()));
    }

    let mut cleaned = query::filter_non_empty_name(&data);
    cleaned.truncate(state.display_limit);

    Ok(HttpResponse::Ok().json(ListView {
        title: "Clean Airbnb Data (No Empty Names)".to_string(),
        data: cleaned,
        use_id_link: true,
    }))
}

async fn price_filter_form() -> HttpResponse {
    HttpResponse::Ok().json(FormView {
        title: PRICE_FILTER_TITLE,
        action: "/viewData/price",
        fields: &["minPrice", "maxPrice"],
    })
}

async fn view_price_range(
    state: web::Data<AppState>,
    form: web::Form<PriceForm>,
) -> Result<HttpResponse, ApiError> {
    let mut v = Validator::new();
    let min = v
        .required("minPrice", form.min_price.as_deref(), "Minimum price is required")
        .and_then(|raw| {
            v.float_min("minPrice", raw, 0.0, "Minimum price must be a positive number")
        });
    let max = v
        .required("maxPrice", form.max_price.as_deref(), "Maximum price is required")
        .and_then(|raw| {
            v.float_min("maxPrice", raw, 0.0, "Maximum price must be a positive number")
        });
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            v.fail("minPrice", "Minimum price cannot be greater than maximum price");
        }
    }
    v.finish()
        .map_err(|errors| ApiError::validation(PRICE_FILTER_TITLE, errors))?;
    let (min, max) = (min.unwrap_or_default(), max.unwrap_or_default());

    let data = load_dataset(&state, "Failed to filter properties by price.")?;
    let filtered = query::filter_by_price_range(&data, min, max);
    if filtered.is_empty() {
        return Err(ApiError::NoResults(format!(
            "No properties found between ${} and ${}",
            min, max
        )));
    }
    debug!("Price range [{}, {}] matched {} listings", min, max, filtered.len());

    Ok(HttpResponse::Ok().json(ListView {
        title: format!("Properties Priced Between ${} and ${}", min, max),
        data: filtered,
        use_id_link: true,
    }))
}

async fn users() -> HttpResponse {
    HttpResponse::Ok().body("respond with a resource")
}
