use actix_web::web;

pub mod change_password;
pub mod health;
pub mod token;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(users::create::create)
            .service(users::list::list)
            .service(users::detail::retrieve)
            .service(users::detail::update)
            .service(users::detail::remove),
    );
    cfg.service(web::scope("/token").service(token::obtain));
    cfg.service(web::scope("/change_password").service(change_password::change_password));
}
