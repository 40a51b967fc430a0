//! Unit and behaviour tests for `mender_actions`.

mod support;


mod behaviour;
