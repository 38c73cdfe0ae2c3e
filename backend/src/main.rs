use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("BlueGene — Personalized Healthcare Meets Advanced Technology")
        .append_to_head(
            r#"
            <meta name="description" content="BlueGene combines medical expertise with advanced technology to deliver safe, ethical, and future-ready healthcare.">
            <link rel="preconnect" href="https://fonts.googleapis.com">
            <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
            <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet">
            <style>
                html {
                    scroll-behavior: smooth;
                }
            </style>
            "#,
        )
}

// The site is fully static; no messages come up from the frontend.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {panic_info:?}");
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}
