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

use logfan::append::file::RotationPolicy;

fn add_numbers(first: i32, second: i32) -> i32 {
    first + second
}

fn main() {
    std::fs::create_dir_all("logs").unwrap();

    let first = rand::random_range(1..=100);
    let second = rand::random_range(1..=100);
    let res = add_numbers(first, second);

    let mut logger = logfan::builder().use_utc(true).build();
    let policy = RotationPolicy::by_size(200).unwrap();
    logger.add_log_file("logs/example.log", Some(policy)).unwrap();

    for iter in 0..10 {
        logfan::fatal!(logger, "iteration {iter}: {first} + {second} = {res}");
        logfan::info!(logger, "iteration {iter}: {first} + {second} = {res}");
    }

    logger.close_all_log_files().unwrap();
}
