#[actix_web::main]
async fn main() -> std::io::Result<()> {
    must_gpa::run().await
}
