use library_desk::desk::launcher::launch;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    launch().await
}
