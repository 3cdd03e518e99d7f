use crate::{
    model::member::LoginDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::member::MemberService,
    },
};
use test_utils::{builder::TestBuilder, factory};
