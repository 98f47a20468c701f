// Copyright (c) 2022 MASSA LABS <info@massa.net>

mod config;
