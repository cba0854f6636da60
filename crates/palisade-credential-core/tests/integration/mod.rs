mod credential_flow;
