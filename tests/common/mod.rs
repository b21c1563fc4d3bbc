#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const USERS_JSON: &str = r#"[
  {"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","phone":"1-770-736-8031 x56442","website":"hildegard.org","company":{"name":"Romaguera-Crona"}},
  {"id":2,"name":"Ervin Howell","username":"Antonette","email":"Shanna@melissa.tv","phone":"010-692-6593 x09125","website":"anastasia.net","company":{"name":"Deckow-Crist"}},
  {"id":3,"name":"Clementine Bauch","username":"Samantha","email":"Nathan@yesenia.net","phone":"1-463-123-4447","website":"ramiro.info","company":{"name":"Romaguera-Jacobson"}},
  {"id":4,"name":"Patricia Lebsack","username":"Karianne","email":"Julianne.OConner@kory.org","phone":"493-170-9623 x156","website":"kale.biz","company":{"name":"Robel-Corkery"}}
]"#;

/// Serves exactly one HTTP request with the given status line and body.
/// Returns the URL to request and the server thread.
pub fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/users", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (url, handle)
}
