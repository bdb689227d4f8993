mod memory_preference_store_tests;
