use crate::{
    api::{attendance, leave, profile},
    auth::{client::AuthApi, handlers},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

/// Registers every route; `A` is the auth service the session forms talk to.
pub fn configure<A: AuthApi + 'static>(cfg: &mut web::ServiceConfig, config: &Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Session screens
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login::<A>)),
            )
            .service(
                web::resource("/register")
                    .wrap(register_limiter)
                    .route(web::post().to(handlers::register::<A>)),
            )
            .service(
                web::resource("/logout")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::logout::<A>)),
            )
            .service(
                web::resource("/session")
                    .wrap(login_limiter)
                    .route(web::get().to(handlers::current_session::<A>)),
            ),
    );

    // Dashboards and profile
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(protected_limiter)
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_dashboard))
                            .route(web::put().to(leave::replace_leave)),
                    )
                    // /leave/current, registered before /{id}
                    .service(
                        web::resource("/current").route(web::get().to(leave::currently_on_leave)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave::get_leave))),
            )
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("").route(web::get().to(attendance::attendance_dashboard)),
                    )
                    .service(
                        web::resource("/check-in").route(web::post().to(attendance::check_in)),
                    ),
            )
            .service(
                web::scope("/profile")
                    .service(web::resource("").route(web::get().to(profile::get_profile)))
                    .service(web::resource("/edit").route(web::post().to(profile::edit_profile)))
                    .service(
                        web::resource("/draft").route(web::patch().to(profile::change_profile)),
                    )
                    .service(web::resource("/save").route(web::post().to(profile::save_profile)))
                    .service(
                        web::resource("/cancel").route(web::post().to(profile::cancel_profile)),
                    ),
            ),
    );
}
