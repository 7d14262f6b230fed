use actix_web::{HttpResponse, Responder, web};
use tracing::{error, trace, warn};

use super::types::{AllQuery, ErrorPayload, IpResponse, WelcomeResponse};
use crate::config::ApiConfig;
use crate::services::LookupGateway;

const WELCOME_MESSAGE: &str = "Welcome to the IP Address API. See help: /help";

/// 首页列出的接口
const ENDPOINTS: [&str; 4] = ["/ip", "/geo", "/all", "/help"];

pub struct LookupService;

impl LookupService {
    pub async fn root() -> impl Responder {
        HttpResponse::Ok().json(WelcomeResponse {
            message: WELCOME_MESSAGE.to_string(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        })
    }

    pub async fn help() -> impl Responder {
        HttpResponse::Ok().json(LookupGateway::help())
    }

    pub async fn self_ip(gateway: web::Data<LookupGateway>) -> HttpResponse {
        trace!("Received public IP request");

        match gateway.resolve_self_ip().await {
            Ok(ip) => HttpResponse::Ok().json(IpResponse { ip }),
            Err(e) => {
                error!("Public IP lookup failed: {}", e);
                HttpResponse::InternalServerError().json(ErrorPayload::self_ip(&e))
            }
        }
    }

    /// 先查本机 IP，再查该 IP 的地理位置，任一步失败都返回 500
    pub async fn geolocation(gateway: web::Data<LookupGateway>) -> HttpResponse {
        trace!("Received geolocation request");

        let ip = match gateway.resolve_self_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                error!("Public IP lookup failed: {}", e);
                return HttpResponse::InternalServerError().json(ErrorPayload::self_ip(&e));
            }
        };

        match gateway.resolve_geolocation(&ip).await {
            Ok(record) => HttpResponse::Ok().json(record),
            Err(e) => {
                error!("Geolocation lookup for {} failed: {}", ip, e);
                HttpResponse::InternalServerError().json(ErrorPayload::geolocation(&e))
            }
        }
    }

    /// 失败时默认返回 200 + 错误 body，`api.all_errors_as_500` 可改为 500
    ///
    /// 查询串按原始键值对读取，`?ip=a&ip=b` 使用最后一个值
    pub async fn all(
        gateway: web::Data<LookupGateway>,
        api: web::Data<ApiConfig>,
        query: web::Query<Vec<(String, String)>>,
    ) -> HttpResponse {
        let ip = AllQuery::from_pairs(query.into_inner()).ip;
        trace!("Received raw data request for ip={:?}", ip);

        match gateway.resolve_all(&ip).await {
            Ok(data) => HttpResponse::Ok().json(data),
            Err(e) => {
                warn!("Raw data lookup for {:?} failed: {}", ip, e);
                let payload = ErrorPayload::all_data(&e);
                if api.all_errors_as_500 {
                    HttpResponse::InternalServerError().json(payload)
                } else {
                    HttpResponse::Ok().json(payload)
                }
            }
        }
    }

    pub async fn not_found() -> HttpResponse {
        HttpResponse::NotFound().json(ErrorPayload::new("Not Found"))
    }
}

pub fn lookup_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(LookupService::root))
        .route("/ip", web::get().to(LookupService::self_ip))
        .route("/geo", web::get().to(LookupService::geolocation))
        .route("/all", web::get().to(LookupService::all))
        .route("/help", web::get().to(LookupService::help))
}
