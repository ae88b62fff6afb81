use greeting_function::greet;
use lamedh_http::{
    handler,
    lambda::{self, Error},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::run(handler(greet)).await?;
    Ok(())
}
