mod backend_profile;
