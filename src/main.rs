#[actix_web::main]
async fn main() -> std::io::Result<()> {
    statuts_server::run().await
}
