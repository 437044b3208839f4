// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg(feature = "bridge-log")]

use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc;
use std::time::Duration;

use logfan::append::Stderr;
use logfan::layout::TextLayout;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Thing<'a>(&'a str);

impl std::fmt::Display for Thing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        log::debug!("formatting wrapping ({})", self.0);
        f.write_str(self.0)
    }
}

// a Display that logs while its record is being formatted must not hang the logger
#[test]
fn test_meta_logging_in_format_works() {
    let out = Captured::default();
    let stderr = Stderr::default()
        .with_layout(TextLayout::default().no_color())
        .with_writer(out.clone());
    logfan::bridge::log::setup_log_crate(logfan::builder().stderr(stderr).build());

    let (done, finished) = mpsc::channel();
    std::thread::spawn(move || {
        log::info!("I'm logging {}!", Thing("aha"));
        log::info!("and again");
        let _ = done.send(());
    });
    finished
        .recv_timeout(Duration::from_secs(5))
        .expect("logging from a Display impl never returned");

    let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert!(lines[0].ends_with("I'm logging aha!"));
    assert!(lines[1].ends_with("and again"));
    assert!(!text.contains("formatting wrapping"));
}
