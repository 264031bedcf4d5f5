use bound_call::bind_once;

fn main() {
    let report = String::from("transfer finished");
    let on_done = bind_once(
        move |bytes: u64| println!("{report}: {bytes} bytes"),
        (),
    );

    // ... the transfer runs ...

    on_done.run((4096,));
    // `on_done` is consumed; a second run would not compile.
}
